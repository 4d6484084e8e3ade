// 검색/필터/정렬 파이프라인
use super::collection::{Collection, CollectionItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionFilter {
    #[default]
    All,
    Favorites,
    /// 보유 중이지만 표준 데코가 덜 모인 종류
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionSort {
    /// 카탈로그 순서
    #[default]
    Default,
    CountDesc,
    CountAsc,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filter: CollectionFilter,
    #[serde(default)]
    pub sort: CollectionSort,
}

impl CollectionQuery {
    pub fn matches(&self, item: &CollectionItem) -> bool {
        self.matches_search(item) && self.matches_filter(item)
    }

    /// 이름, 설명, 태그 부분 일치 (대소문자 무시)
    fn matches_search(&self, item: &CollectionItem) -> bool {
        let q = self.search.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        item.name.to_lowercase().contains(&q)
            || item.description.to_lowercase().contains(&q)
            || item.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }

    fn matches_filter(&self, item: &CollectionItem) -> bool {
        match self.filter {
            CollectionFilter::All => true,
            CollectionFilter::Favorites => item.is_favorite,
            CollectionFilter::Incomplete => item.is_incomplete(),
        }
    }

    /// 필터 후 정렬 (stable sort - 같은 수는 카탈로그 순서 유지)
    pub fn apply<'a>(&self, collection: &'a Collection) -> Vec<&'a CollectionItem> {
        let mut items: Vec<&CollectionItem> =
            collection.items.iter().filter(|i| self.matches(i)).collect();

        match self.sort {
            CollectionSort::Default => {}
            CollectionSort::CountDesc => items.sort_by_key(|i| std::cmp::Reverse(i.count)),
            CollectionSort::CountAsc => items.sort_by_key(|i| i.count),
        }

        items
    }
}
