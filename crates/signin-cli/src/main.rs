mod cli;

use signin_core::interrupt;

fn main() {
    if let Err(e) = cli::run() {
        if e.downcast_ref::<interrupt::InterruptedError>().is_some() {
            std::process::exit(130);
        }
        // Already reported on stdout/stderr.
        if e.downcast_ref::<cli::SignInRejected>().is_none() {
            eprintln!("{e:#}");
        }
        std::process::exit(1);
    }
}
