/// Skip a test if the git binary is not available.
#[macro_export]
macro_rules! skip_without_git {
    () => {
        if std::process::Command::new("git")
            .arg("--version")
            .output()
            .map(|o| !o.status.success())
            .unwrap_or(true)
        {
            eprintln!("SKIPPED: git not installed");
            return;
        }
    };
}
