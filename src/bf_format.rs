use anyhow::Context;
use bf_powdr::encoder;
use std::env;
use std::fs;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 && args.len() != 3 {
        eprintln!("Usage: {} <program.bf> [input.in]", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(program_path: &str, input_path: Option<&str>) -> anyhow::Result<()> {
    let program = fs::read_to_string(program_path)
        .with_context(|| format!("reading program {}", program_path))?;

    let input_values = match input_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading input stream {}", path))?;
            encoder::parse_input_values(&text)?
        }
        None => Vec::new(),
    };
    log::debug!("encoding {} input values", input_values.len());

    let image = encoder::encode(&program, &input_values);
    println!("{}", encoder::to_line(&image));
    Ok(())
}
