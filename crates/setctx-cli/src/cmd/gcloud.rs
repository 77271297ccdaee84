use setctx_core::gcloud::{self, GcloudCli};

pub fn create(project_name: &str) -> anyhow::Result<()> {
    super::emit(|script| script.create_gcloud_project(project_name))
}

pub fn set(project_name: &str) -> anyhow::Result<()> {
    super::emit(|script| script.set_gcloud_project(project_name))
}

pub fn delete_all() -> anyhow::Result<()> {
    let cloud = GcloudCli::new();
    super::emit(|script| gcloud::delete_gcloud_projects(&cloud, script))
}
