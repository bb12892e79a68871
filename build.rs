fn main() {
    println!("cargo:rerun-if-changed=cfg.toml");

    // ホストでのテスト時はESP-IDFの環境変数が存在しないためスキップ
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}
