use crate::_test_util::{mk_random_expression, truth_vector, RANDOM_VAR_NAMES};
use crate::expression::Expression;
use crate::{generate_table, parse, Assignment, TableGenerator, VariableOrder, RESULT_COLUMN};
use test_log::test;

#[test]
fn truth_table_row_count_and_header() {
    let inputs = [
        ("1", 0),
        ("!a", 1),
        ("a & b", 2),
        ("[a | b] => (c <=> [!a])", 3),
        ("a & b | c & d => !e", 5),
    ];
    for (input, num_vars) in inputs.iter() {
        let parsed = parse(input).unwrap();
        assert_eq!(*num_vars, parsed.variables().len());
        let table = generate_table(parsed.expression(), parsed.variables()).unwrap();
        assert_eq!(1 << num_vars, table.num_rows());
        let num_tagged = parsed.expression().tagged_labels().len();
        assert_eq!(num_vars + num_tagged + 1, table.num_columns());
        assert_eq!(RESULT_COLUMN, table.header().last().unwrap());
        for row in table.rows() {
            assert_eq!(table.num_columns(), row.len());
            assert!(row.iter().all(|v| *v <= 1));
        }
    }
}

#[test]
fn truth_table_enumeration_order() {
    let parsed = parse("a | b").unwrap();
    let table = generate_table(parsed.expression(), parsed.variables()).unwrap();
    let assignments: Vec<Vec<u8>> = table.rows().iter().map(|r| r[..2].to_vec()).collect();
    assert_eq!(
        vec![vec![1, 1], vec![1, 0], vec![0, 1], vec![0, 0]],
        assignments
    );
}

#[test]
fn truth_table_tagged_and_untagged_groups_agree() {
    let tagged = parse("[a => b] & c").unwrap();
    let untagged = parse("(a => b) & c").unwrap();
    let tagged_table = generate_table(tagged.expression(), tagged.variables()).unwrap();
    let untagged_table = generate_table(untagged.expression(), untagged.variables()).unwrap();
    assert_eq!(vec!["a", "b", "c", "a=>b", "V"], tagged_table.header().to_vec());
    assert_eq!(vec!["a", "b", "c", "V"], untagged_table.header().to_vec());
    assert_eq!(tagged_table.result_column(), untagged_table.result_column());
}

#[test]
fn truth_table_nested_brackets() {
    let parsed = parse("[[a] & ([b] | 0)]").unwrap();
    let table = generate_table(parsed.expression(), parsed.variables()).unwrap();
    assert_eq!(
        vec!["a", "b", "a", "b", "(a)&((b)|0)", "V"],
        table.header().to_vec()
    );
    assert_eq!(vec![1u8, 0, 1, 0, 0, 0], table.rows()[1]);
}

#[test]
fn truth_table_double_negation() {
    for seed in 0..50 {
        let x = mk_random_expression(4, seed);
        let order = VariableOrder::new(&RANDOM_VAR_NAMES);
        let not_not_x = Expression::mk_not(Expression::mk_not(x.clone()));
        assert_eq!(truth_vector(&x, &order), truth_vector(&not_not_x, &order));
    }
}

#[test]
fn truth_table_equivalence_is_symmetric() {
    let order = VariableOrder::new(&RANDOM_VAR_NAMES);
    for seed in 0..50 {
        let l = mk_random_expression(3, seed);
        let r = mk_random_expression(3, seed + 1000);
        let lr = Expression::mk_equivalent(l.clone(), r.clone());
        let rl = Expression::mk_equivalent(r, l);
        assert_eq!(truth_vector(&lr, &order), truth_vector(&rl, &order));
    }
}

#[test]
fn truth_table_display_reparses() {
    let order = VariableOrder::new(&RANDOM_VAR_NAMES);
    for seed in 0..100 {
        let expression = mk_random_expression(5, seed);
        let reparsed = parse(&expression.to_string()).unwrap();
        assert_eq!(expression.variables(), *reparsed.variables());
        assert_eq!(
            truth_vector(&expression, &order),
            truth_vector(reparsed.expression(), &order)
        );
    }
}

#[test]
fn truth_table_source_text_reparses() {
    let order = VariableOrder::new(&RANDOM_VAR_NAMES);
    for seed in 0..100 {
        let expression = mk_random_expression(5, seed);
        let text = expression.source_text();
        let reparsed = parse(&text).unwrap();
        assert_eq!(text, reparsed.expression().source_text());
        assert_eq!(
            truth_vector(&expression, &order),
            truth_vector(reparsed.expression(), &order)
        );
    }
}

#[test]
fn truth_table_group_labels_keep_meaning() {
    let order = VariableOrder::new(&RANDOM_VAR_NAMES);
    for seed in 0..50 {
        let inner = mk_random_expression(4, seed);
        let group = Expression::mk_group(inner.clone(), true);
        let label = parse(group.tagged_labels().last().unwrap()).unwrap();
        assert_eq!(truth_vector(&inner, &order), truth_vector(label.expression(), &order));
    }
}

#[test]
fn truth_table_tagged_values_match_columns() {
    for seed in 0..30 {
        let expression = mk_random_expression(4, seed);
        let variables = expression.variables();
        let table = TableGenerator::new()
            .generate(&expression, &variables)
            .unwrap();
        let order = VariableOrder::new(&variables);
        let labels = expression.tagged_labels();
        for (row_index, row) in table.rows().iter().enumerate() {
            let assignment = Assignment::from_row_index(order.num_vars(), row_index);
            let (value, tagged) = expression.eval_tagged(&order, &assignment).unwrap();
            assert_eq!(labels.len(), tagged.len());
            let expected_tagged: Vec<u8> = tagged.values().into_iter().map(u8::from).collect();
            let n = order.num_vars();
            assert_eq!(expected_tagged, row[n..(n + labels.len())].to_vec());
            assert_eq!(u8::from(value), *row.last().unwrap());
        }
    }
}
