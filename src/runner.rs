use std::thread;
use std::time::Duration;

use log::info;

use crate::cli::Cli;
use crate::env::EnvSnapshot;
use crate::logging::{FILE_LEVEL_VAR, STDERR_LEVEL_VAR};
use crate::output::CycleProgress;

/// Number of delay cycles the runner always performs, independent of input.
pub const CYCLES: u64 = 5;

/// Fixed sleep per cycle.
pub const CYCLE_DELAY: Duration = Duration::from_millis(100);

const ENV_HINT: &str = "Not set. Copy `.env_template` to `.env`";

/// Log the greeting and environment report, then run the progress demo.
pub fn run(cli: &Cli, env: &EnvSnapshot) {
    info!(
        "{}",
        greeting(&cli.required_arg, cli.optional_arg.as_deref())
    );
    for line in env_report(env) {
        info!("{line}");
    }

    let progress = CycleProgress::start(CYCLES);
    run_cycles(CYCLES, CYCLE_DELAY, || progress.advance());
    progress.finish();
}

fn run_cycles(cycles: u64, delay: Duration, mut tick: impl FnMut()) {
    for _ in 0..cycles {
        thread::sleep(delay);
        tick();
    }
}

/// The greeting line embedding both invocation arguments.
///
/// An absent optional argument is logged as `None`.
pub fn greeting(required: &str, optional: Option<&str>) -> String {
    format!(
        "Hello! required_arg = {required}, optional_arg = {}",
        optional.unwrap_or("None")
    )
}

/// The three environment report lines, with verbatim fallback text for
/// unset variables.
pub fn env_report(env: &EnvSnapshot) -> [String; 3] {
    [
        format!("PYTHONPATH = {}", env.get("PYTHONPATH", "Not set")),
        format!(
            "{STDERR_LEVEL_VAR} = {}",
            env.get(STDERR_LEVEL_VAR, ENV_HINT)
        ),
        format!("{FILE_LEVEL_VAR} = {}", env.get(FILE_LEVEL_VAR, ENV_HINT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_greeting_embeds_both_arguments() {
        assert_eq!(
            greeting("alpha", Some("beta")),
            "Hello! required_arg = alpha, optional_arg = beta"
        );
    }

    #[test]
    fn test_greeting_marks_absent_optional_argument() {
        assert_eq!(
            greeting("alpha", None),
            "Hello! required_arg = alpha, optional_arg = None"
        );
    }

    #[test]
    fn test_env_report_uses_values_when_set() {
        let env = snapshot(&[
            ("PYTHONPATH", "/opt/lib"),
            ("LOG_STDERR_LEVEL", "debug"),
            ("LOG_FILE_LEVEL", "warn"),
        ]);
        assert_eq!(
            env_report(&env),
            [
                "PYTHONPATH = /opt/lib",
                "LOG_STDERR_LEVEL = debug",
                "LOG_FILE_LEVEL = warn",
            ]
        );
    }

    #[test]
    fn test_env_report_fallbacks_are_verbatim() {
        let report = env_report(&EnvSnapshot::default());
        assert_eq!(report[0], "PYTHONPATH = Not set");
        assert_eq!(
            report[1],
            "LOG_STDERR_LEVEL = Not set. Copy `.env_template` to `.env`"
        );
        assert_eq!(
            report[2],
            "LOG_FILE_LEVEL = Not set. Copy `.env_template` to `.env`"
        );
    }

    #[test]
    fn test_log_content_is_deterministic() {
        let env = snapshot(&[("PYTHONPATH", "/opt/lib")]);
        assert_eq!(greeting("alpha", Some("beta")), greeting("alpha", Some("beta")));
        assert_eq!(env_report(&env), env_report(&env));
    }

    #[test]
    fn test_runner_performs_exactly_five_cycles() {
        let mut ticks = 0;
        run_cycles(CYCLES, Duration::ZERO, || ticks += 1);
        assert_eq!(ticks, 5);
    }
}
