fn main() {
  if let Err(err) = react_lib_init::run() {
    react_lib_init::report_failure(&err);
    std::process::exit(1);
  }
}
