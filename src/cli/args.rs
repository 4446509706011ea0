use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Source vertex id
    pub from: String,

    /// Destination vertex id
    pub to: String,

    /// Fail (exit code 1) when the destination is unreachable
    #[arg(long)]
    pub strict: bool,
}
