//! Status workflow actions layered over the entity stores.
//!
//! Any status in an entity's enum may follow any other. The actions here only
//! add the side effects a plain field update would not have.

use chrono::NaiveDate;
use tracing::info;

use crate::models::{BlogPost, Devis, DevisStatus, Lead, LeadStatus, Subscriber, SubscriberStatus, User};
use crate::store::{today, Repository};

/// Set a lead's pipeline status. Closed leads may be reopened.
pub async fn set_lead_status(repo: &Repository, id: &str, status: LeadStatus) -> Option<Lead> {
    repo.modify(id, |lead: &mut Lead| lead.status = status).await
}

/// Flip a post between draft and published, leaving every other field alone.
pub async fn toggle_publish(repo: &Repository, id: &str) -> Option<BlogPost> {
    let post = repo
        .modify(id, |post: &mut BlogPost| post.status = post.status.toggled())
        .await?;
    info!(id, status = %post.status, "Blog post publication toggled");
    Some(post)
}

/// Mark a quote as sent. Delivery itself belongs to the notification service.
pub async fn send_devis(repo: &Repository, id: &str) -> Option<Devis> {
    let devis = repo
        .modify(id, |devis: &mut Devis| devis.status = DevisStatus::Sent)
        .await?;
    info!(id, to = %devis.client_email, "Quote handed to notification service");
    Some(devis)
}

pub async fn unsubscribe(repo: &Repository, id: &str) -> Option<Subscriber> {
    unsubscribe_on(repo, id, today()).await
}

/// Unsubscribe as of `date`. An already unsubscribed record keeps its
/// original timestamp.
pub async fn unsubscribe_on(repo: &Repository, id: &str, date: NaiveDate) -> Option<Subscriber> {
    let current = repo.get::<Subscriber>(id).await?;
    if current.status == SubscriberStatus::Unsubscribed {
        return Some(current);
    }

    repo.modify(id, |subscriber: &mut Subscriber| {
        subscriber.status = SubscriberStatus::Unsubscribed;
        subscriber.unsubscribed_at = Some(date);
    })
    .await
}

/// Request a password reset e-mail. Nothing is stored.
pub async fn reset_password(repo: &Repository, id: &str) -> Option<User> {
    let user = repo.get::<User>(id).await?;
    info!(id, email = %user.email, "Password reset requested");
    Some(user)
}
