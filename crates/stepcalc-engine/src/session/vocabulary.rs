//! Command vocabulary

use stepcalc_core::KindTag;

/// What one input line at the prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Run a fresh command of this kind
    Run(KindTag),
    /// Clear the slot and end the session
    Exit,
}

impl Directive {
    /// Exact, case-sensitive match after trimming; anything unrecognized
    /// runs the not-found command.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "add" => Directive::Run(KindTag::Add),
            "median" => Directive::Run(KindTag::Median),
            "rand" => Directive::Run(KindTag::Rand),
            "help" => Directive::Run(KindTag::Help),
            "exit" => Directive::Exit,
            _ => Directive::Run(KindTag::NotFound),
        }
    }
}
