use crate::cli::CountArgs;
use crate::error::Result;
use prestab::structure::count_residues;
use tracing::info;

pub fn run(args: CountArgs) -> Result<()> {
    let count = count_residues(&args.input)?;
    info!(
        "Counted {} standard residues in {}.",
        count,
        args.input.display()
    );
    println!("{}", count);
    Ok(())
}
