use miette::Result;

/// Main entry point for the cycle-trail CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    cycle_trail::init_tracing();

    // Run the library's main function
    cycle_trail::run()
}
