/// typofix - Typo Correction CLI
use std::env;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::process;

use tracing::Level;
use typofix::{AutoFix, Context, Corrector, CorrectorConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("typofix v{}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    typofix [OPTIONS] <INPUT>");
    eprintln!("    typofix [OPTIONS] --suggest <WORD>");
    eprintln!("    typofix [OPTIONS] --interactive");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help             Print this help message");
    eprintln!("    -v, --version          Print version information");
    eprintln!("    -o, --output <FILE>    Write corrected text to FILE (default: stdout)");
    eprintln!("    -c, --config <FILE>    Read settings from FILE (default: user typofix.toml)");
    eprintln!("    --check                Report fixes only; exit with 1 if any are found");
    eprintln!("    --suggest <WORD>       Print ranked suggestions for WORD");
    eprintln!("    --context <KIND>       Context for --suggest: method, function, keyword, general");
    eprintln!("    --interactive          Correct stdin line by line");
    eprintln!("    -q, --quiet            Only log errors");
    eprintln!("    --verbose              Log every applied fix");
    eprintln!();
    eprintln!("ARGUMENTS:");
    eprintln!("    <INPUT>                Source file to correct (use '-' for stdin)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    typofix script.cds");
    eprintln!("    typofix --check script.cds");
    eprintln!("    typofix --suggest pus --context method");
    eprintln!("    echo 'likh(\"hi\")' | typofix -");
}

fn print_version() {
    println!("typofix {}", VERSION);
}

struct Options {
    input: Option<String>,
    output: Option<String>,
    config: Option<String>,
    check: bool,
    suggest: Option<String>,
    context: Context,
    interactive: bool,
    log_level: Level,
}

fn parse_context(kind: &str) -> Result<Context, String> {
    match kind {
        "method" => Ok(Context::Method),
        "function" => Ok(Context::Function),
        "keyword" => Ok(Context::Keyword),
        "general" => Ok(Context::General),
        other => Err(format!("Unknown context: {}", other)),
    }
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();

    let mut options = Options {
        input: None,
        output: None,
        config: None,
        check: false,
        suggest: None,
        context: Context::General,
        interactive: false,
        log_level: Level::WARN,
    };
    let mut i = 1;

    let value_for = |i: &mut usize, flag: &str| -> Result<String, String> {
        *i += 1;
        args.get(*i)
            .cloned()
            .ok_or_else(|| format!("Missing value after {}", flag))
    };

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                process::exit(0);
            }
            "-o" | "--output" => options.output = Some(value_for(&mut i, "-o")?),
            "-c" | "--config" => options.config = Some(value_for(&mut i, "-c")?),
            "--suggest" => options.suggest = Some(value_for(&mut i, "--suggest")?),
            "--context" => options.context = parse_context(&value_for(&mut i, "--context")?)?,
            "--check" => options.check = true,
            "--interactive" => options.interactive = true,
            "-q" | "--quiet" => options.log_level = Level::ERROR,
            "--verbose" => options.log_level = Level::DEBUG,
            arg if arg.starts_with('-') && arg != "-" => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => {
                if options.input.is_some() {
                    return Err("Multiple input files specified".to_string());
                }
                options.input = Some(arg.to_string());
            }
        }
        i += 1;
    }

    Ok(options)
}

fn load_corrector(config_path: Option<&str>) -> Result<Corrector, String> {
    let config = match config_path {
        Some(path) => CorrectorConfig::load(Path::new(path)),
        None => CorrectorConfig::discover(),
    }
    .map_err(|e| e.to_string())?;
    Corrector::from_config(config).map_err(|e| e.to_string())
}

fn read_input(input: &str) -> Result<String, String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else {
        let path = Path::new(input);
        if !path.exists() {
            return Err(format!("Input file not found: {}", input));
        }
        fs::read_to_string(path).map_err(|e| format!("Failed to read file '{}': {}", input, e))
    }
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), String> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .map_err(|e| format!("Failed to create output file '{}': {}", path, e))?;
            file.write_all(content.as_bytes())
                .map_err(|e| format!("Failed to write to output file '{}': {}", path, e))?;
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

fn format_fixes(result: &AutoFix) -> String {
    result
        .fixes
        .iter()
        .map(|fix| format!("{} -> {} ({})\n", fix.original, fix.suggested, fix.context))
        .collect()
}

fn run_suggest(corrector: &Corrector, word: &str, context: Context) {
    let max = corrector.config().max_suggestions;
    let suggestions = corrector.suggest_with_confidence(word, context, max);
    if suggestions.is_empty() {
        println!("No suggestions for '{}'", word);
        return;
    }
    for s in suggestions {
        println!("{:<24} {:>3}% {:?}", s.word, s.confidence, s.method);
    }
}

fn run_interactive(corrector: &Corrector) -> Result<(), String> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read from stdin: {}", e))?;
        let result = corrector.auto_fix_code(&line);
        println!("{}", result.text);
        eprint!("{}", format_fixes(&result));
    }
    Ok(())
}

fn run(options: &Options) -> Result<i32, String> {
    let corrector = load_corrector(options.config.as_deref())?;

    if let Some(word) = &options.suggest {
        run_suggest(&corrector, word, options.context);
        return Ok(0);
    }

    if options.interactive {
        run_interactive(&corrector)?;
        return Ok(0);
    }

    let Some(input) = options.input.as_deref() else {
        return Err("Missing input file".to_string());
    };
    let source = read_input(input)?;
    let result = corrector.auto_fix_code(&source);

    if options.check {
        print!("{}", format_fixes(&result));
        return Ok(if result.is_changed() { 1 } else { 0 });
    }

    eprint!("{}", format_fixes(&result));
    write_output(options.output.as_deref(), &result.text)?;
    Ok(0)
}

fn main() {
    let options = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(options.log_level)
        .with_writer(io::stderr)
        .init();

    match run(&options) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
