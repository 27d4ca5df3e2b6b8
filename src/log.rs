//! Console output helpers.
//!
//! Progress goes to stdout, problems go to stderr. Colors are only emitted
//! when the target stream supports them.

macro_rules! error {
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            eprintln!(
                "{}: {}",
                "error".if_supports_color(owo_colors::Stream::Stderr, |s| s
                        .style(owo_colors::Style::new().bold().red())),
                format_args!($($arg)*)
            );
        }
    }
}

macro_rules! warn {
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            eprintln!(
                "{}: {}",
                "warning".if_supports_color(owo_colors::Stream::Stderr, |s| s
                        .style(owo_colors::Style::new().bold().yellow())),
                format_args!($($arg)*)
            );
        }
    };
}

/// A finished milestone, prefixed with a green check mark.
macro_rules! success {
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            println!(
                "{} {}",
                "✔".if_supports_color(owo_colors::Stream::Stdout, |s| s
                        .style(owo_colors::Style::new().bold().green())),
                format_args!($($arg)*)
            );
        }
    }
}

/// One patch step of the scaffold run.
macro_rules! step {
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            println!(
                "{} {}",
                "-".if_supports_color(owo_colors::Stream::Stdout, |s| s
                        .style(owo_colors::Style::new().cyan())),
                format_args!($($arg)*)
            );
        }
    }
}

macro_rules! trace {
    ($($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            if std::env::var_os("RWAPP_TRACE").is_some() {
                eprintln!(
                    "{}: {}",
                    "trace".if_supports_color(owo_colors::Stream::Stderr, |s| s
                            .style(owo_colors::Style::new().bold())),
                    format_args!($($arg)*)
                );
            }
        }
    }
}
