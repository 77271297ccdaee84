fn truthy(segment: Option<&str>) -> bool {
    segment.is_some_and(|s| !s.is_empty())
}

pub fn run(
    project: Option<&str>,
    service: Option<&str>,
    version: Option<&str>,
) -> anyhow::Result<()> {
    super::emit(|script| script.prompt(truthy(project), truthy(service), truthy(version)))
}
