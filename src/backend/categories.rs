use crate::{
    backend::{Resource, repository::Repository},
    types::{Category, CategoryDraft},
};

#[derive(Debug, Clone, Copy)]
pub struct Categories;

impl Resource for Categories {
    type Record = Category;
    type Draft = CategoryDraft;
    type Patch = CategoryDraft;
    type Scope = ();

    const NAME: &'static str = "category";
    const BASE: &'static str = "/api/categories";

    fn list_path(_: ()) -> String {
        Self::collection_path()
    }

    fn scope_of(_: &Category) {}
}

pub type CategoryRepository = Repository<Categories>;
