fn main() {
    hgm_cli::init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let code = hgm_cli::run(args, &mut out, &mut err);
    std::process::exit(code);
}
