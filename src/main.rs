fn main() {
    smt_batch::app::cli::run();
}
