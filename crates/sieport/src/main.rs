//! sieport - export bookkeeping data to the SIE 4 interchange format.

fn main() -> std::process::ExitCode {
    sieport::cmd::export::main()
}
