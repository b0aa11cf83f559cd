use ddlview::app::DdlViewerState;
use ddlview::domain::SqlDialectInfo;
use ddlview::infra::DialectCatalog;

pub fn postgres_dialect() -> SqlDialectInfo {
    DialectCatalog::builtin()
        .unwrap()
        .preset("PostgreSQL")
        .unwrap()
        .clone()
}

pub fn sample_ddl() -> &'static str {
    "CREATE TABLE \"public\".\"users\" (\n  \"id\" integer NOT NULL,\n  \"name\" text,\n  PRIMARY KEY (\"id\")\n);"
}

pub fn loading_state() -> DdlViewerState {
    DdlViewerState {
        is_loading: true,
        metadata: None,
        dialect: None,
    }
}

pub fn loaded_state() -> DdlViewerState {
    DdlViewerState {
        is_loading: false,
        metadata: Some(sample_ddl().to_string()),
        dialect: Some(postgres_dialect()),
    }
}

pub fn loaded_state_without_dialect() -> DdlViewerState {
    DdlViewerState {
        is_loading: false,
        metadata: Some(sample_ddl().to_string()),
        dialect: None,
    }
}

pub fn empty_state() -> DdlViewerState {
    DdlViewerState {
        is_loading: false,
        metadata: None,
        dialect: None,
    }
}
