fn main() {
    tested_up_to::app::cli::run();
}
