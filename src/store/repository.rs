//! The process-wide repository owning every store.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::NaiveDate;
use tracing::info;

use super::{Document, DocumentStore, EntityStore, Record};
use crate::errors::AppError;
use crate::models::{
    BlogPost, Devis, Faq, HomePageContent, Lead, PricingPackage, Project, SiteSettings,
    Subscriber, TeamMember, Testimonial, User,
};

/// All collections and documents, plus the revision counter.
///
/// Every successful mutation made through the repository bumps the revision
/// exactly once; reads never do.
#[derive(Default)]
pub struct Repository {
    revision: AtomicI64,
    pub projects: EntityStore<Project>,
    pub leads: EntityStore<Lead>,
    pub blog_posts: EntityStore<BlogPost>,
    pub team_members: EntityStore<TeamMember>,
    pub testimonials: EntityStore<Testimonial>,
    pub pricing_packages: EntityStore<PricingPackage>,
    pub faqs: EntityStore<Faq>,
    pub devis: EntityStore<Devis>,
    pub subscribers: EntityStore<Subscriber>,
    pub users: EntityStore<User>,
    pub home_content: DocumentStore<HomePageContent>,
    pub settings: DocumentStore<SiteSettings>,
}

/// Locates the store for a record type inside the repository.
pub trait Collection: Record {
    fn store(repo: &Repository) -> &EntityStore<Self>;
}

/// Locates the store for a singleton document inside the repository.
pub trait Singleton: Document {
    fn slot(repo: &Repository) -> &DocumentStore<Self>;
}

macro_rules! collections {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl Collection for $ty {
                fn store(repo: &Repository) -> &EntityStore<Self> {
                    &repo.$field
                }
            }
        )+
    };
}

collections! {
    Project => projects,
    Lead => leads,
    BlogPost => blog_posts,
    TeamMember => team_members,
    Testimonial => testimonials,
    PricingPackage => pricing_packages,
    Faq => faqs,
    Devis => devis,
    Subscriber => subscribers,
    User => users,
}

impl Singleton for HomePageContent {
    fn slot(repo: &Repository) -> &DocumentStore<Self> {
        &repo.home_content
    }
}

impl Singleton for SiteSettings {
    fn slot(repo: &Repository) -> &DocumentStore<Self> {
        &repo.settings
    }
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current revision ID.
    pub fn revision_id(&self) -> i64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Increment the revision ID and return the new value.
    fn increment_revision(&self) -> i64 {
        self.revision.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn list<T: Collection>(&self) -> Vec<T> {
        T::store(self).list().await
    }

    pub async fn get<T: Collection>(&self, id: &str) -> Option<T> {
        T::store(self).get(id).await
    }

    pub async fn create<T: Collection>(&self, request: T::Create) -> T {
        let record = T::store(self).create(request).await;
        let revision = self.increment_revision();
        info!(kind = T::KIND, id = record.id(), revision, "record created");
        record
    }

    pub async fn create_on<T: Collection>(&self, request: T::Create, today: NaiveDate) -> T {
        let record = T::store(self).create_on(request, today).await;
        let revision = self.increment_revision();
        info!(kind = T::KIND, id = record.id(), revision, "record created");
        record
    }

    pub async fn update<T: Collection>(&self, id: &str, patch: T::Patch) -> Option<T> {
        let record = T::store(self).update(id, patch).await?;
        let revision = self.increment_revision();
        info!(kind = T::KIND, id, revision, "record updated");
        Some(record)
    }

    /// In-place change used by the status workflow.
    pub async fn modify<T, F>(&self, id: &str, f: F) -> Option<T>
    where
        T: Collection,
        F: FnOnce(&mut T),
    {
        let record = T::store(self).modify(id, f).await?;
        let revision = self.increment_revision();
        info!(kind = T::KIND, id, revision, "record modified");
        Some(record)
    }

    pub async fn delete<T: Collection>(&self, id: &str) -> bool {
        let removed = T::store(self).delete(id).await;
        if removed {
            let revision = self.increment_revision();
            info!(kind = T::KIND, id, revision, "record deleted");
        }
        removed
    }

    pub async fn document<D: Singleton>(&self) -> D {
        D::slot(self).get().await
    }

    /// Replace a singleton document wholesale.
    pub async fn save_document<D: Singleton>(&self, document: D) -> D {
        let slot = D::slot(self);
        slot.set(document).await;
        let revision = self.increment_revision();
        info!(kind = D::KIND, revision, "document saved");
        slot.get().await
    }

    pub async fn edit_document<D, F>(&self, f: F) -> Result<D, AppError>
    where
        D: Singleton,
        F: FnOnce(&mut D) -> Result<(), AppError>,
    {
        let document = D::slot(self).edit(f).await?;
        let revision = self.increment_revision();
        info!(kind = D::KIND, revision, "document edited");
        Ok(document)
    }
}
