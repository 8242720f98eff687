use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::modules::distribution::adapters::outbound::in_memory::InMemoryStore;
use crate::modules::distribution::core::agent::Agent;
use crate::shared::infrastructure::temp_storage::local::LocalTempStorage;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::agents::seeded_store;
use crate::tests::fixtures::multipart::{file_part, upload_request};
use crate::tests::fixtures::spreadsheets::{
    Cell, contacts_csv, contacts_workbook, numbered_contacts, workbook,
};

const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

struct Service {
    app: Router,
    store: Arc<InMemoryStore>,
    roster: Vec<Agent>,
    upload_dir: TempDir,
}

impl Service {
    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    async fn upload(&self, file_name: &str, bytes: &[u8]) -> (StatusCode, serde_json::Value) {
        self.send(upload_request(
            "/upload",
            &[file_part("file", file_name, bytes)],
        ))
        .await
    }

    async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn names_for(&self, agent: &Agent) -> Vec<String> {
        let (status, json) = self.get(&format!("/entries/agent/{}", agent.id)).await;
        assert_eq!(status, StatusCode::OK);
        json.as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["first_name"].as_str().unwrap().to_string())
            .collect()
    }

    fn staged_files(&self) -> usize {
        staged_files_in(self.upload_dir.path())
    }
}

fn staged_files_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

async fn service_with(names: &[&str]) -> Service {
    let (store, roster) = seeded_store(names).await;
    let upload_dir = tempfile::tempdir().unwrap();
    let temp_storage = LocalTempStorage::create(upload_dir.path()).await.unwrap();
    let state = AppState::new(store.clone(), Arc::new(temp_storage));
    Service {
        app: router(state, MAX_UPLOAD_BYTES),
        store,
        roster,
        upload_dir,
    }
}

#[fixture]
async fn service() -> Service {
    service_with(&["Ada", "Bob", "Cy"]).await
}

#[rstest]
#[tokio::test]
async fn it_should_distribute_an_uploaded_csv_across_the_roster(#[future] service: Service) {
    let service = service.await;

    let (status, json) = service
        .upload("leads.csv", &contacts_csv(&numbered_contacts(7)))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "File processed successfully");
    assert_eq!(json["entries_count"], 7);
    assert_eq!(service.store.entry_count().await, 7);
    assert_eq!(service.staged_files(), 0);

    let (status, agents) = service.get("/agents").await;
    assert_eq!(status, StatusCode::OK);
    let backlogs: Vec<u64> = agents
        .as_array()
        .unwrap()
        .iter()
        .map(|agent| agent["assigned_entries"].as_u64().unwrap())
        .collect();
    assert_eq!(backlogs, vec![3, 2, 2]);

    assert_eq!(
        service.names_for(&service.roster[0]).await,
        vec!["Contact 6", "Contact 3", "Contact 0"]
    );
    assert_eq!(
        service.names_for(&service.roster[2]).await,
        vec!["Contact 5", "Contact 2"]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_distribute_a_workbook_exactly_like_the_same_csv() {
    let contacts = numbered_contacts(5);
    let from_csv = service_with(&["Ada", "Bob"]).await;
    let from_xlsx = service_with(&["Ada", "Bob"]).await;

    let (csv_status, _) = from_csv.upload("leads.csv", &contacts_csv(&contacts)).await;
    let (xlsx_status, _) = from_xlsx
        .upload("leads.xlsx", &contacts_workbook(&contacts))
        .await;

    assert_eq!(csv_status, StatusCode::CREATED);
    assert_eq!(xlsx_status, StatusCode::CREATED);
    for position in 0..2 {
        assert_eq!(
            from_csv.names_for(&from_csv.roster[position]).await,
            from_xlsx.names_for(&from_xlsx.roster[position]).await,
        );
    }
}

#[rstest]
#[tokio::test]
async fn it_should_store_numeric_phone_cells_as_text(#[future] service: Service) {
    let service = service.await;
    let bytes = workbook(&[
        vec!["FirstName".into(), "Phone".into(), "Notes".into()],
        vec!["Ann".into(), 5551234.0_f64.into(), "".into()],
    ]);

    let (status, _) = service.upload("leads.xlsx", &bytes).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, entries) = service.get("/entries").await;
    assert_eq!(entries[0]["phone"], "5551234");
    assert_eq!(entries[0]["notes"], "");
    assert_eq!(entries[0]["status"], "pending");
    assert_eq!(entries[0]["assigned_agent"]["name"], "Ada");
}

#[rstest]
#[tokio::test]
async fn it_should_restart_the_rotation_at_the_first_agent_on_every_upload(
    #[future] service: Service,
) {
    let service = service.await;

    service
        .upload("first.csv", &contacts_csv(&[["Ann", "1", ""]]))
        .await;
    service
        .upload("second.csv", &contacts_csv(&[["Ben", "2", ""]]))
        .await;

    assert_eq!(service.names_for(&service.roster[0]).await, vec!["Ben", "Ann"]);
    assert!(service.names_for(&service.roster[1]).await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_reject_a_file_missing_a_required_column(#[future] service: Service) {
    let service = service.await;
    let bytes = workbook(&[
        vec![Cell::from("FirstName"), Cell::from("Phone")],
        vec![Cell::from("Ann"), Cell::from("555")],
    ]);

    let (status, json) = service.upload("leads.xlsx", &bytes).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "invalid file structure, missing required fields: Notes"
    );
    assert_eq!(service.store.entry_count().await, 0);
    assert_eq!(service.staged_files(), 1);
}

#[rstest]
#[tokio::test]
async fn it_should_reject_an_upload_when_no_agent_is_registered() {
    let service = service_with(&[]).await;

    let (status, json) = service
        .upload("leads.csv", &contacts_csv(&numbered_contacts(3)))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "no agents available");
    assert_eq!(service.store.entry_count().await, 0);
    assert_eq!(service.staged_files(), 1);
}

#[rstest]
#[tokio::test]
async fn it_should_report_and_keep_the_upload_when_persistence_fails_midway(
    #[future] service: Service,
) {
    let service = service.await;
    service.store.fail_entry_writes_after(4).await;

    let (status, json) = service
        .upload("leads.csv", &contacts_csv(&numbered_contacts(7)))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["entries_created"], 4);
    assert_eq!(service.store.entry_count().await, 4);
    assert_eq!(service.staged_files(), 1);
}
