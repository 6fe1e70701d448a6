use tabled::Table;

use crate::{
    cli::{open, with_spinner},
    error, info,
    routes::Route,
    success,
    types::{CategoryDraft, CategoryTableRow, RecordId},
    views::CategoryList,
};

pub async fn list_categories() {
    let session = open(Route::Courses).await;
    let mut categories = CategoryList::new(session.client(), ());

    let list = match with_spinner("Fetching categories...", categories.load()).await {
        Ok(list) => list,
        Err(e) => error!("Failed to load categories. Err: {}", e),
    };

    if list.is_empty() {
        info!("No categories found.");
        return;
    }

    let rows: Vec<CategoryTableRow> = list
        .iter()
        .map(|c| CategoryTableRow {
            id: c.id,
            name: c.name.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub async fn add_category(name: String) {
    let session = open(Route::Courses).await;
    let mut categories = CategoryList::new(session.client(), ());

    match with_spinner("Saving category...", categories.create(&CategoryDraft { name })).await {
        Ok(c) => success!("Created category '{}' (#{})", c.name, c.id),
        Err(e) => error!("Failed to save category. Err: {}", e),
    }
}

pub async fn rename_category(id: RecordId, name: String) {
    let session = open(Route::Courses).await;
    let mut categories = CategoryList::new(session.client(), ());

    match with_spinner("Saving category...", categories.update(id, &CategoryDraft { name })).await {
        Ok(c) => success!("Renamed category #{} to '{}'", c.id, c.name),
        Err(e) => error!("Failed to update category. Err: {}", e),
    }
}

pub async fn delete_category(id: RecordId) {
    let session = open(Route::Courses).await;
    let mut categories = CategoryList::new(session.client(), ());

    match with_spinner("Deleting category...", categories.delete(id)).await {
        Ok(()) => success!("Deleted category #{}", id),
        Err(e) => error!("Failed to delete category. Err: {}", e),
    }
}
