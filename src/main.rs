use clap::Parser;
use haversacks::{BagColor, RuleSet};
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Answers questions about nested bag rules")]
struct Args {
    /// Bag to ask about, as "<descriptor> <color>"
    #[arg(short, long, default_value = "shiny gold")]
    target: BagColor,

    /// Rules file, one rule per line; stdin when omitted
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let rules = match &args.input {
        Some(path) => RuleSet::read(BufReader::new(std::fs::File::open(path)?))?,
        None => {
            let stdin = std::io::stdin();
            let rules = RuleSet::read(stdin.lock())?;
            rules
        }
    };

    log::info!("read {} rules with contents", rules.len());

    let part_one = rules.count_possible_containers(&args.target);
    let part_two = rules.count_total_contained(&args.target)?;

    println!("{}", part_one);
    println!("{}", part_two);

    Ok(())
}
