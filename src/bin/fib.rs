use anyhow::Result;
use numbench::cli;

fn main() -> Result<()> {
    cli::handle_fib()
}
