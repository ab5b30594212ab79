fn main() {
    if let Err(e) = cfr_jump_cli::run() {
        eprintln!("[Decompiler] {}", e);
        std::process::exit(1);
    }
}
