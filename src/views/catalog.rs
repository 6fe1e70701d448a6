use crate::{
    backend::{ApiClient, courses},
    error::ApiError,
    types::{Course, CourseDetails, RecordId},
    utils,
    views::{CategoryList, CourseList},
};

/// The course screen: all courses, all categories and a category filter.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: CourseList,
    categories: CategoryList,
    selected: Vec<RecordId>,
}

impl CourseCatalog {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            courses: CourseList::new(client, ()),
            categories: CategoryList::new(client, ()),
            selected: Vec::new(),
        }
    }

    /// Lists courses and categories concurrently.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        futures::try_join!(self.courses.load(), self.categories.load())?;
        Ok(())
    }

    pub fn courses(&self) -> &CourseList {
        &self.courses
    }

    pub fn courses_mut(&mut self) -> &mut CourseList {
        &mut self.courses
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut CategoryList {
        &mut self.categories
    }

    pub fn selected_categories(&self) -> &[RecordId] {
        &self.selected
    }

    pub fn select_categories(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    /// Adds the category to the filter, or removes it if already selected.
    pub fn toggle_category(&mut self, id: RecordId) {
        match self.selected.iter().position(|&s| s == id) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => self.selected.push(id),
        }
    }

    /// Courses matching the category filter, in listing order.
    pub fn visible(&self) -> Vec<&Course> {
        utils::filter_courses_by_categories(self.courses.records().as_slice(), &self.selected)
    }

    /// Comma-separated names of the course's categories.
    ///
    /// Identifiers without a loaded category are shown as `#id`.
    pub fn category_names(&self, course: &Course) -> String {
        course
            .category
            .iter()
            .map(|&id| match self.categories.get(id) {
                Some(category) => category.name.clone(),
                None => format!("#{id}"),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Topic and question counts for every course.
    pub async fn details(&self) -> Result<Vec<CourseDetails>, ApiError> {
        courses::catalog_details(self.courses.repository().client()).await
    }
}
