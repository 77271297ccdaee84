pub fn clear() -> anyhow::Result<()> {
    super::emit(|script| script.clear_context_vars())
}
