/// Flag-name normalization: underscores in long flags are read as hyphens.
///
/// Lets `--output_file` and `--output-file` resolve to the same option, so
/// invocations written for the Python `model_signing` CLI keep working.
use std::ffi::OsString;

/// Map a raw flag name to its canonical spelling.
#[must_use]
pub fn normalize_flag_name(name: &str) -> String {
    name.replace('_', "-")
}

/// Normalize every long flag in an argument vector.
///
/// The first element is the program name and is kept as-is. For each `--name`
/// or `--name=value`, only `name` is rewritten. Arguments after a bare `--`
/// terminator, short flags, positionals and non-UTF-8 arguments are untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut terminated = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || terminated {
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            terminated = true;
            out.push(arg);
            continue;
        }
        match text.strip_prefix("--") {
            Some(flag) => out.push(normalize_long_flag(flag).into()),
            None => out.push(arg),
        }
    }

    out
}

fn normalize_long_flag(flag: &str) -> String {
    match flag.split_once('=') {
        Some((name, value)) => format!("--{}={value}", normalize_flag_name(name)),
        None => format!("--{}", normalize_flag_name(flag)),
    }
}
