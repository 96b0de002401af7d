use crate::expression::Expression;
use crate::{Assignment, AssignmentIterator, VariableOrder};
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

/// Variable names used by randomly generated expressions (mixed case on purpose).
pub const RANDOM_VAR_NAMES: [&str; 5] = ["a", "B", "c", "D", "e"];

/// Generate a random expression of the given maximal `height`, using the variables in
/// `RANDOM_VAR_NAMES` and occasionally constants and (tagged) groups.
pub fn mk_random_expression(height: u8, seed: u64) -> Expression {
    let mut rand = StdRng::seed_from_u64(seed);
    random_expression(&mut rand, height)
}

fn random_expression(rand: &mut StdRng, height: u8) -> Expression {
    if height == 0 || rand.next_u32() % 5 == 0 {
        return match rand.next_u32() % 8 {
            0 => Expression::mk_value(true),
            1 => Expression::mk_value(false),
            _ => {
                let i = rand.next_u32() as usize % RANDOM_VAR_NAMES.len();
                Expression::mk_variable(RANDOM_VAR_NAMES[i])
            }
        };
    }
    let height = height - 1;
    match rand.next_u32() % 7 {
        0 => Expression::mk_not(random_expression(rand, height)),
        1 => {
            let tagged = rand.next_u32() % 2 == 0;
            Expression::mk_group(random_expression(rand, height), tagged)
        }
        op => {
            let left = random_expression(rand, height);
            let right = random_expression(rand, height);
            match op {
                2 => Expression::mk_and(left, right),
                3 => Expression::mk_or(left, right),
                4 => Expression::mk_implies(left, right),
                _ => Expression::mk_equivalent(left, right),
            }
        }
    }
}

/// Evaluate `expression` in every assignment over `order`, in table order.
pub fn truth_vector(expression: &Expression, order: &VariableOrder) -> Vec<bool> {
    AssignmentIterator::new(order.num_vars())
        .map(|assignment: Assignment| expression.eval_in(order, &assignment).unwrap())
        .collect()
}
