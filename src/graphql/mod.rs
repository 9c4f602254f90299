//! # GraphQL Schema
//!
//! The externally visible shape of a yeti and the single query entry point.
//! Read-only: no mutation fields are defined.

use std::sync::Arc;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Object, Result as GraphQLResult, Schema, ID,
};
use uuid::Uuid;

use crate::model::Yeti;
use crate::store::YetiRepository;

/// The queryable yeti shape: id, name, and email only.
///
/// The password digest has no field here, so it cannot leak through any
/// query regardless of how the result is filtered.
pub struct YetiObject {
    id: Uuid,
    name: String,
    email: String,
}

#[Object(name = "Yeti")]
impl YetiObject {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    /// Nullable in the schema even though the store requires it.
    async fn email(&self) -> Option<&str> {
        Some(&self.email)
    }
}

impl From<Yeti> for YetiObject {
    fn from(yeti: Yeti) -> Self {
        Self {
            id: yeti.id,
            name: yeti.name,
            email: yeti.email,
        }
    }
}

/// Root query type
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Info on yetis: the yeti with the given name if one is supplied,
    /// otherwise every yeti in insertion order.
    ///
    /// "Not found" is an empty sequence, never an error.
    async fn yeti(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> GraphQLResult<Vec<YetiObject>> {
        let store = ctx.data::<Arc<dyn YetiRepository>>()?;

        let yetis = match name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => store.find_by_name(name)?.into_iter().collect(),
            None => store.all()?,
        };

        Ok(yetis.into_iter().map(YetiObject::from).collect())
    }
}

/// Schema type with no mutations or subscriptions
pub type YetiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the store available to resolvers
pub fn build_schema(store: Arc<dyn YetiRepository>) -> YetiSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}
