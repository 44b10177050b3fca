use triage::{DispatchOutcome, DispatchReport};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_dispatch(value: i64, report: &DispatchReport, color: bool) {
    let palette = ansi::Palette::new(color);

    println!("{}", palette.bold(palette.paint(format!("⚙  Dispatch: {value}"), ansi::CYAN)));

    for step in &report.trace {
        let mark = if step.matched {
            palette.paint("✓ hit", ansi::GREEN)
        } else {
            palette.dim("✗ miss")
        };
        println!(
            "  {} {} {}",
            palette.paint(format!("[{}]", step.index), ansi::GRAY),
            palette.paint(step.name, ansi::BLUE),
            mark
        );
    }

    let outcome = match &report.outcome {
        DispatchOutcome::Handled { rule, .. } => palette.paint(format!("handled by '{rule}'"), ansi::GREEN),
        DispatchOutcome::MatchedWithoutHandler { rule, .. } => {
            palette.paint(format!("matched '{rule}' (no handler)"), ansi::YELLOW)
        }
        DispatchOutcome::NoMatch => palette.dim("no rule matched"),
    };

    println!(
        "  {} {} {}",
        outcome,
        palette.dim("│"),
        palette.dim(format!(
            "{:?} │ {} evaluated, {} skipped",
            report.metrics.total, report.metrics.rules_evaluated, report.metrics.slots_skipped
        ))
    );
    println!();
}
