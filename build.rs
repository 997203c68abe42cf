// The service id can be baked in at compile time (`option_env!` in core::config),
// so a change to it must trigger a rebuild.
fn main() {
    println!("cargo:rerun-if-env-changed=CORRECTOR_SERVICE_ID");
    println!("cargo:rerun-if-env-changed=CORRECTOR_BASE_URL");
}
