//! The `run` command: parse and evaluate a Scripter source file.

use scripter_eval::{EvalOptions, GlobalContext, RuntimeDomain};

use super::{read_file, report_error};

/// Options for `scripter run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub path: String,
    /// `(name, path)` pairs declared as modules before the main program runs.
    pub modules: Vec<(String, String)>,
    /// How many times to evaluate the program. Statics persist across runs.
    pub times: usize,
    pub max_depth: Option<usize>,
    pub step_limit: Option<u64>,
}

impl RunOptions {
    pub fn new(path: impl Into<String>) -> Self {
        RunOptions {
            path: path.into(),
            modules: Vec::new(),
            times: 1,
            max_depth: None,
            step_limit: None,
        }
    }

    pub fn eval_options(&self) -> EvalOptions {
        let mut options = EvalOptions::new();
        if let Some(depth) = self.max_depth {
            options = options.max_call_depth(depth);
        }
        if let Some(limit) = self.step_limit {
            options = options.step_limit(limit);
        }
        options
    }
}

/// Parse the arguments following `run`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut path = None;
    let mut modules = Vec::new();
    let mut times = 1;
    let mut max_depth = None;
    let mut step_limit = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag, Some(value.to_string()))
            }
            _ => (arg.as_str(), None),
        };
        if !flag.starts_with('-') {
            if path.is_some() {
                return Err(format!("unexpected argument '{arg}'"));
            }
            path = Some(arg.clone());
            continue;
        }
        let mut value = || {
            inline
                .clone()
                .or_else(|| iter.next().cloned())
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag {
            "--module" | "-m" => {
                let spec = value()?;
                let Some((name, module_path)) = spec.split_once('=') else {
                    return Err(format!("expected --module <name>=<path>, got '{spec}'"));
                };
                modules.push((name.to_string(), module_path.to_string()));
            }
            "--times" | "-n" => times = parse_number(flag, &value()?)?,
            "--max-depth" => max_depth = Some(parse_number(flag, &value()?)?),
            "--step-limit" => step_limit = Some(parse_number(flag, &value()?)?),
            _ => return Err(format!("unknown option '{flag}'")),
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(RunOptions {
        path,
        modules,
        times,
        max_depth,
        step_limit,
    })
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a non-negative integer, got '{value}'"))
}

/// Run a Scripter source file.
///
/// Declares every `--module` first, then evaluates the program `times`
/// times, printing each result that is not `undefined`. Any error is
/// rendered with a source snippet and exits with status 1.
pub fn run_file(options: &RunOptions) {
    let global = GlobalContext::new();

    for (name, module_path) in &options.modules {
        let source = read_file(module_path);
        if let Err(err) = crate::declare_module(&global, name, &source) {
            report_error(&err, &source, module_path);
        }
        tracing::debug!(module = %name, path = %module_path, "declared module");
    }

    let path = options.path.as_str();
    let source = read_file(path);
    let program = match crate::parse(&source, &global) {
        Ok(program) => program,
        Err(err) => report_error(&err, &source, path),
    };

    let mut domain = RuntimeDomain::new(options.eval_options());
    for _ in 0..options.times {
        match program.evaluate(&mut domain) {
            Ok(value) if value.is_undefined() => {}
            Ok(value) => println!("{value}"),
            Err(err) => report_error(&crate::Error::from(err), &source, path),
        }
    }
}
