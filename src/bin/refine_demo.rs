use probe_refiner::config::{load_config, RuntimeConfig};
use probe_refiner::{IdentityUpdate, RefineResult, Refiner};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: refine_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&path))?;

    let matrix = config.matrix.build()?;
    let refiner = Refiner::new(config.refine.clone());
    let result = refiner
        .refine(&matrix, &config.probes, &mut IdentityUpdate)
        .map_err(|e| format!("refinement failed: {e}"))?;

    print_text_summary(&config, &result);

    if let Some(out) = &config.output.json_out {
        let trace = result
            .trace
            .as_ref()
            .ok_or_else(|| "json_out set but refine.collect_trace is false".to_string())?;
        let json = serde_json::to_string_pretty(trace)
            .map_err(|e| format!("Failed to serialize trace: {e}"))?;
        fs::write(out, json).map_err(|e| format!("Failed to write {}: {e}", out.display()))?;
        println!("Trace written to {}", out.display());
    }

    Ok(())
}

fn print_text_summary(config: &RuntimeConfig, result: &RefineResult) {
    let (nhypo, nprobe) = result.matrix.shape();
    println!("hypotheses:  {nhypo}");
    println!("probes:      {nprobe}");
    println!("iterations:  {}", result.iterations);
    println!("converged:   {}", result.converged);
    println!("power:       {}", config.refine.power);
    for row in 0..nhypo {
        let cells: Vec<String> = (0..nprobe)
            .map(|col| format!("{:.6}", result.matrix.as_inner()[(row, col)]))
            .collect();
        println!("h{row}: [{}]", cells.join(", "));
    }
}
