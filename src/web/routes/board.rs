use askama::Template;
use axum::{extract::State, response::Html};

use crate::database::ActivityStore;
use crate::error::AppError;
use crate::services::activities_service;
use crate::web::escape::filters;

// Implicit escaping is off; every user-supplied field goes through `escape_text`.
#[derive(Template)]
#[template(path = "board.html", escape = "none")]
pub struct BoardTemplate {
    pub activities: Vec<activities_service::ActivityCardView>,
    pub total_participants: usize,
    pub build_id: &'static str,
}

pub async fn board_handler(State(store): State<ActivityStore>) -> Result<Html<String>, AppError> {
    let data = activities_service::build_board_page(&store);

    let template = BoardTemplate {
        activities: data.activities,
        total_participants: data.total_participants,
        build_id: super::BUILD_ID,
    };
    Ok(Html(template.render()?))
}
