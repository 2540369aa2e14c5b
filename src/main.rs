use anyhow::Context;
use bf_powdr::compiler;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

// The machine template is read from the working directory and carries
// the {{ program }} placeholder.
const TEMPLATE_PATH: &str = "brainfuck_template.asm";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <program.bf>", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(&args[1]) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(filename: &str) -> anyhow::Result<()> {
    let program = fs::read_to_string(filename)
        .with_context(|| format!("reading program {}", filename))?;

    let asm = compiler::compile(&program)?;
    log::info!("compiled {} into {} instructions", filename, asm.len());

    let main_function = compiler::wrap_main(&asm);

    let template = fs::read_to_string(TEMPLATE_PATH)
        .with_context(|| format!("reading machine template {}", TEMPLATE_PATH))?;
    let compiled = compiler::apply_template(&template, &main_function);

    let output_path = Path::new(filename).with_extension("asm");
    fs::write(&output_path, compiled)
        .with_context(|| format!("writing {}", output_path.display()))?;
    log::info!("wrote {}", output_path.display());

    Ok(())
}
