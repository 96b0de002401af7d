use std::fs::OpenOptions;
use std::path::PathBuf;

use clap::Parser;
use truth_tables::named_function::write_record;
use truth_tables::{parse, NamedFunction, TableGenerator};

#[derive(Parser, Debug)]
#[command(name = "truth_table")]
#[command(about = "Print the truth table of a Boolean expression")]
struct Args {
    /// Expression, e.g. "[a & b] => c"
    expression: String,

    /// Maximal number of variables
    #[arg(short, long, default_value_t = truth_tables::DEFAULT_VARIABLE_LIMIT)]
    limit: usize,

    /// Append the expression as a named function record to this file
    #[arg(short, long, value_name = "FILE", requires = "name")]
    save: Option<PathBuf>,

    /// Name of the saved function
    #[arg(short, long)]
    name: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let parsed = parse(&args.expression)?;
    let table = TableGenerator::new()
        .with_variable_limit(Some(args.limit))
        .generate(parsed.expression(), parsed.variables())?;
    println!("{}", table);

    if let (Some(path), Some(name)) = (args.save, args.name) {
        let function = NamedFunction::from_parsed(&name, &args.expression, &parsed)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        write_record(&mut file, &function)?;
        println!("Saved `{}` to {}", function, path.display());
    }

    Ok(())
}
