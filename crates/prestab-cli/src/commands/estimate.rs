use crate::cli::EstimateArgs;
use crate::error::Result;
use prestab::resources::{Mode, ResourceEstimate, estimate};
use prestab::structure::count_residues;
use serde::Serialize;
use tracing::{info, warn};

/// Machine-readable form of one sizing run, for `--json` consumers.
#[derive(Serialize)]
struct EstimateReport {
    mode: Mode,
    residues: usize,
    #[serde(flatten)]
    resources: ResourceEstimate,
    memory: String,
}

pub fn run(args: EstimateArgs) -> Result<()> {
    let mode = Mode::from(args.mode.as_str());
    if mode == Mode::Single && args.mode != "single" {
        warn!(
            "Unrecognized mode '{}'; falling back to the 'single' formulas.",
            args.mode
        );
    }

    let residues = count_residues(&args.input)?;
    info!(
        "Counted {} standard residues in {}.",
        residues,
        args.input.display()
    );

    let resources = estimate(mode, residues);
    info!(
        "Estimated resources for mode '{}': {} CPUs, {} memory, {}s runtime.",
        mode,
        resources.cpus,
        resources.memory_request(),
        resources.runtime_secs
    );

    if args.json {
        let report = EstimateReport {
            mode,
            residues,
            memory: resources.memory_request(),
            resources,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("residues: {}", residues);
        println!("mode:     {}", mode);
        println!("cpus:     {}", resources.cpus);
        println!("memory:   {}", resources.memory_request());
        println!("runtime:  {}s", resources.runtime_secs);
    }

    Ok(())
}
