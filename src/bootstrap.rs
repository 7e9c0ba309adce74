//! Startup seeding of sample catalog data.
//!
//! Each collection is wiped and re-populated with a fixed list of records.
//! Failures are logged and never abort startup.

use crate::domain::category::Category;
use crate::domain::vendor::Vendor;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, VendorReader, VendorWriter};

pub const SAMPLE_CATEGORIES: [&str; 5] = ["Fruits", "Nuts", "Breads", "Meats", "Eggs"];

pub const SAMPLE_VENDORS: [(&str, &str); 4] = [
    ("Joe", "Buck"),
    ("Michael", "Weston"),
    ("Jessie", "Waters"),
    ("Jimmy", "Buffet"),
];

/// Replace all categories with [`SAMPLE_CATEGORIES`], returning the stored count.
pub fn seed_categories<R>(repo: &R) -> RepositoryResult<usize>
where
    R: CategoryReader + CategoryWriter,
{
    repo.delete_all_categories()?;

    let categories: Vec<Category> = SAMPLE_CATEGORIES.into_iter().map(Category::new).collect();
    repo.save_categories(&categories)?;

    repo.count_categories()
}

/// Replace all vendors with [`SAMPLE_VENDORS`], returning the stored count.
pub fn seed_vendors<R>(repo: &R) -> RepositoryResult<usize>
where
    R: VendorReader + VendorWriter,
{
    repo.delete_all_vendors()?;

    let vendors: Vec<Vendor> = SAMPLE_VENDORS
        .into_iter()
        .map(|(first_name, last_name)| Vendor::new(first_name, last_name))
        .collect();
    repo.save_vendors(&vendors)?;

    repo.count_vendors()
}

/// Seed both collections, logging the resulting counts.
pub fn load_sample_data<R>(repo: &R)
where
    R: CategoryReader + CategoryWriter + VendorReader + VendorWriter,
{
    match seed_categories(repo) {
        Ok(count) => log::info!("{count} categories saved"),
        Err(e) => log::error!("Failed to seed categories: {e}"),
    }

    match seed_vendors(repo) {
        Ok(count) => log::info!("{count} vendors saved"),
        Err(e) => log::error!("Failed to seed vendors: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;

    #[test]
    fn replaces_existing_categories() {
        let repo = TestRepository::new(vec![Category::new("Stale")], vec![]);

        let count = seed_categories(&repo).unwrap();

        assert_eq!(count, 5);
        let descriptions: Vec<_> = repo
            .categories()
            .into_iter()
            .map(|c| c.description.unwrap())
            .collect();
        assert_eq!(descriptions, SAMPLE_CATEGORIES);
        assert!(repo.categories().iter().all(|c| c.id.is_some()));
    }

    #[test]
    fn seeds_vendors() {
        let repo = TestRepository::default();

        assert_eq!(seed_vendors(&repo).unwrap(), 4);
        assert_eq!(
            repo.vendors()[1],
            Vendor {
                id: repo.vendors()[1].id.clone(),
                ..Vendor::new("Michael", "Weston")
            }
        );
    }

    #[test]
    fn failures_do_not_panic() {
        let repo = TestRepository::failing();
        load_sample_data(&repo);
        assert_eq!(repo.save_count(), 0);
    }
}
