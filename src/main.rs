fn main() {
    env_logger::init();
    holdem_advisor::cli::run();
}
