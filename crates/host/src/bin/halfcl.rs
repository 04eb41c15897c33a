fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = halfcl_host::halfcl_cli(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
