//! REST client for one backend collection.
//!
//! `ResourceClient<T>` performs network IO against `{api}/{T::PATH}` and keeps the
//! injected entity cache coherent with every successful call. It holds no UI
//! state; callers map results into their own state.

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::cache::{EntityCache, TtlCache};
use crate::config::BusinessConfig;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::model::{Page, Resource, StatusUpdate};
use crate::query::ListQuery;

pub struct ResourceClient<T: Resource> {
    http: HttpClient,
    api_url: String,
    cache: Arc<dyn EntityCache<T::Id, T>>,
}

impl<T: Resource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            api_url: self.api_url.clone(),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(
        config: &BusinessConfig,
        http: HttpClient,
        cache: Arc<dyn EntityCache<T::Id, T>>,
    ) -> Self {
        Self {
            http,
            api_url: config.api_url(),
            cache,
        }
    }

    /// Client with its own HTTP client and an in-memory cache using the configured TTL.
    pub fn from_config(config: &BusinessConfig) -> ApiResult<Self> {
        let http = HttpClient::new(config)?;
        let cache: Arc<dyn EntityCache<T::Id, T>> = Arc::new(TtlCache::new(config.cache_ttl));
        Ok(Self::new(config, http, cache))
    }

    pub fn cache(&self) -> &Arc<dyn EntityCache<T::Id, T>> {
        &self.cache
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.api_url, T::PATH)
    }

    fn item_url(&self, id: &T::Id) -> String {
        format!("{}/{}/{id}", self.api_url, T::PATH)
    }

    /// GET `/{path}?skip=&take=&search=&{field}={value}`
    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<T>> {
        let page: Page<T> = self
            .http
            .get(self.collection_url())
            .query(query.to_query_pairs())
            .send()
            .await?
            .error_for_status()?
            .json("page")?;

        debug!(
            "Fetched {} {} (skip={}, take={}, total={})",
            page.data.len(),
            T::PATH,
            query.skip,
            query.take,
            page.total
        );

        for row in &page.data {
            self.cache.insert(row.id().clone(), row.clone());
        }
        Ok(page)
    }

    /// GET `/{path}/{id}`, served from the cache while the entry is fresh.
    pub async fn get(&self, id: &T::Id) -> ApiResult<T> {
        if let Some(hit) = self.cache.get(id) {
            debug!("Cache hit for {}/{id}", T::PATH);
            return Ok(hit);
        }

        let record: T = self
            .http
            .get(self.item_url(id))
            .send()
            .await?
            .error_for_status()?
            .json("record")?;

        self.cache.insert(id.clone(), record.clone());
        Ok(record)
    }

    /// POST `/{path}`
    pub async fn create(&self, draft: &T::Draft) -> ApiResult<T> {
        let created: T = self
            .http
            .post(self.collection_url())
            .json(draft)?
            .send()
            .await?
            .error_for_status()?
            .json("created record")?;

        self.cache.insert(created.id().clone(), created.clone());
        Ok(created)
    }

    /// PUT `/{path}/{id}`
    pub async fn update(&self, id: &T::Id, draft: &T::Draft) -> ApiResult<T> {
        self.cache.invalidate(id);

        let updated: T = self
            .http
            .put(self.item_url(id))
            .json(draft)?
            .send()
            .await?
            .error_for_status()?
            .json("updated record")?;

        self.cache.insert(id.clone(), updated.clone());
        Ok(updated)
    }

    /// DELETE `/{path}/{id}`
    pub async fn delete(&self, id: &T::Id) -> ApiResult<()> {
        self.cache.invalidate(id);

        self.http
            .delete(self.item_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// PATCH `/{path}/{id}/status` with `{ "status": ... }`
    pub async fn set_status<S>(&self, id: &T::Id, status: S) -> ApiResult<T>
    where
        S: Serialize + Send + Sync,
    {
        self.cache.invalidate(id);

        let updated: T = self
            .http
            .patch(format!("{}/status", self.item_url(id)))
            .json(&StatusUpdate { status })?
            .send()
            .await?
            .error_for_status()?
            .json("updated record")?;

        self.cache.insert(id.clone(), updated.clone());
        Ok(updated)
    }
}
