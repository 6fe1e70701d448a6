use crate::{
    cli::{open, with_spinner},
    error, info,
    routes::Route,
    views::DashboardTotals,
};

pub async fn dashboard() {
    let session = open(Route::Dashboard).await;

    let load = DashboardTotals::load(session.client());
    let totals = match with_spinner("Fetching totals...", load).await {
        Ok(t) => t,
        Err(e) => error!("Failed to load dashboard. Err: {}", e),
    };

    info!("Courses:   {}", totals.courses);
    info!("Topics:    {}", totals.topics);
    info!("Questions: {}", totals.questions);
}
