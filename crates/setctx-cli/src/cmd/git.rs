pub fn create() -> anyhow::Result<()> {
    super::emit(|script| script.create_git_repo())
}
