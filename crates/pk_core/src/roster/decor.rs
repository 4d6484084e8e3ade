// 데코(장식) 카탈로그
//
// 표준 데코 39종 + 희귀 변형 + 이벤트 프리셋

/// 희귀 변형 (예: 반짝이는 요리사 모자)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorVariant {
    pub id: &'static str,
    pub name: &'static str,
}

/// 데코 분류 그룹
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorGroup {
    Food,
    City,
    Shopping,
    Nature,
    Travel,
}

impl DecorGroup {
    pub fn name(&self) -> &'static str {
        match self {
            DecorGroup::Food => "餐飲美食 (Food)",
            DecorGroup::City => "城市設施 (City)",
            DecorGroup::Shopping => "購物 (Shopping)",
            DecorGroup::Nature => "戶外與自然 (Nature)",
            DecorGroup::Travel => "交通與旅遊 (Travel)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub group: DecorGroup,
    pub variants: &'static [DecorVariant],
}

impl DecorCategory {
    /// 변형 ID (`{decor}_{variant}`)
    pub fn variant_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.variants.iter().map(move |v| format!("{}_{}", self.id, v.id))
    }

    /// 괄호 앞 표시 이름
    pub fn short_name(&self) -> &'static str {
        self.name.split('(').next().unwrap_or(self.name).trim_end()
    }
}

const fn decor(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    group: DecorGroup,
) -> DecorCategory {
    DecorCategory { id, name, icon, group, variants: &[] }
}

const SHINY: &[DecorVariant] = &[DecorVariant { id: "shiny", name: "✨ 閃亮廚師帽 (Shiny)" }];
const FOUR_LEAF: &[DecorVariant] = &[DecorVariant { id: "4leaf", name: "🍀 四葉草 (4-Leaf)" }];

pub static DECOR_CATEGORIES: [DecorCategory; 39] = [
    // Food
    DecorCategory {
        id: "restaurant",
        name: "餐廳 (Restaurant)",
        icon: "Utensils",
        group: DecorGroup::Food,
        variants: SHINY,
    },
    decor("cafe", "咖啡廳 (Cafe)", "Coffee", DecorGroup::Food),
    decor("sweetshop", "甜點店 (Sweetshop)", "CakeSlice", DecorGroup::Food),
    decor("burger", "漢堡店 (Burger)", "Sandwich", DecorGroup::Food),
    decor("bakery", "麵包店 (Bakery)", "Croissant", DecorGroup::Food),
    decor("pizza", "披薩 (Pizza)", "Pizza", DecorGroup::Food),
    decor("sushi", "壽司 (Sushi)", "Fish", DecorGroup::Food),
    decor("ramen", "拉麵 (Ramen)", "Soup", DecorGroup::Food),
    decor("curry", "咖哩 (Curry)", "CookingPot", DecorGroup::Food),
    decor("ice_cream", "冰淇淋 (Ice Cream)", "Popsicle", DecorGroup::Food),
    decor("donut", "甜甜圈 (Donut)", "CircleDot", DecorGroup::Food),
    decor("macaron", "馬卡龍 (Macaron)", "Circle", DecorGroup::Food),
    // City
    decor("movie", "電影院 (Movie)", "Film", DecorGroup::City),
    decor("pharmacy", "藥局 (Pharmacy)", "Pill", DecorGroup::City),
    decor("post_office", "郵局 (Post Office)", "Mail", DecorGroup::City),
    decor("art_gallery", "美術館 (Art Gallery)", "Palette", DecorGroup::City),
    decor("library", "圖書館/書店 (Library)", "Book", DecorGroup::City),
    decor("theme_park", "主題樂園 (Theme Park)", "FerrisWheel", DecorGroup::City),
    decor("stadium", "體育場 (Stadium)", "Trophy", DecorGroup::City),
    decor("hotel", "飯店 (Hotel)", "BedDouble", DecorGroup::City),
    decor("shrine", "神社/寺廟 (Shrine)", "Landmark", DecorGroup::City),
    // Shopping
    decor("corner_store", "便利商店 (Store)", "Store", DecorGroup::Shopping),
    decor("supermarket", "超市 (Supermarket)", "ShoppingBasket", DecorGroup::Shopping),
    decor("salon", "理髮廳 (Salon)", "Scissors", DecorGroup::Shopping),
    decor("clothing", "服飾店 (Clothing)", "Shirt", DecorGroup::Shopping),
    decor("makeup", "美妝 (Makeup)", "Gem", DecorGroup::Shopping),
    decor("appliance", "電器行 (Appliance)", "Tv", DecorGroup::Shopping),
    // Nature
    decor("zoo", "動物園 (Zoo)", "PawPrint", DecorGroup::Nature),
    decor("forest", "森林 (Forest)", "Trees", DecorGroup::Nature),
    decor("waterside", "水邊 (Waterside)", "Waves", DecorGroup::Nature),
    decor("beach", "海灘 (Beach)", "Umbrella", DecorGroup::Nature),
    decor("mountain", "山 (Mountain)", "Mountain", DecorGroup::Nature),
    decor("weather", "天氣 (Weather)", "CloudRain", DecorGroup::Nature),
    DecorCategory {
        id: "park",
        name: "公園 (Park)",
        icon: "Shrub",
        group: DecorGroup::Nature,
        variants: FOUR_LEAF,
    },
    // Travel
    decor("airport", "機場 (Airport)", "Plane", DecorGroup::Travel),
    decor("station", "車站 (Station)", "Train", DecorGroup::Travel),
    decor("bus_stop", "公車站 (Bus Stop)", "Bus", DecorGroup::Travel),
    decor("bridge", "橋樑 (Bridge)", "Waypoints", DecorGroup::Travel),
    decor("roadside", "路邊 (Roadside)", "MapPin", DecorGroup::Travel),
];

/// 이벤트 데코 프리셋 (자유 입력 이름과 같은 네임스페이스)
pub static EVENT_PRESETS: [&str; 10] = [
    "2024 萬聖節 (Halloween)",
    "2024 花牌 (Hanafuda)",
    "麻將 (Mahjong)",
    "手指滑板 (Fingerboard)",
    "起司 (Cheese)",
    "拼圖 (Puzzle)",
    "復活節 (Easter)",
    "農曆新年 (Lunar New Year)",
    "情人節 (Valentine)",
    "賞月 (Moon Viewing)",
];

/// 수집 데코 ID 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorKind {
    Standard,
    Variant,
    Event,
    Custom,
}

pub fn find_decor(id: &str) -> Option<&'static DecorCategory> {
    DECOR_CATEGORIES.iter().find(|d| d.id == id)
}

/// ID 문자열을 카탈로그 기준으로 분류
///
/// `_`는 표준 ID(`post_office`)에도 들어가므로 문자열 규칙이 아니라 카탈로그로 판별한다.
pub fn classify_decor(id: &str) -> DecorKind {
    if find_decor(id).is_some() {
        return DecorKind::Standard;
    }
    let is_variant = DECOR_CATEGORIES
        .iter()
        .any(|d| d.variants.iter().any(|v| id.strip_prefix(d.id).and_then(|r| r.strip_prefix('_')) == Some(v.id)));
    if is_variant {
        DecorKind::Variant
    } else if EVENT_PRESETS.contains(&id) {
        DecorKind::Event
    } else {
        DecorKind::Custom
    }
}

/// 그룹별 데코 목록 (카탈로그 순서 유지)
pub fn decors_by_group() -> Vec<(DecorGroup, Vec<&'static DecorCategory>)> {
    let mut groups: Vec<(DecorGroup, Vec<&'static DecorCategory>)> = Vec::new();
    for decor in DECOR_CATEGORIES.iter() {
        match groups.iter_mut().find(|(g, _)| *g == decor.group) {
            Some((_, list)) => list.push(decor),
            None => groups.push((decor.group, vec![decor])),
        }
    }
    groups
}

/// 이름 검색 (대소문자 무시)
pub fn search_decors(query: &str) -> Vec<&'static DecorCategory> {
    let q = query.to_lowercase();
    DECOR_CATEGORIES.iter().filter(|d| d.name.to_lowercase().contains(&q)).collect()
}
