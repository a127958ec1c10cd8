//! Fixed word bank and spy-word candidates.
//!
//! Content is compiled in and never changes at runtime. Each category has
//! twelve words; every word has a short list of near-synonyms the spy may get.

use crate::types::{Category, SpySimilarity};
use rand::seq::IndexedRandom;
use rand::Rng;

type SpyTable = &'static [(&'static str, &'static [&'static str])];

pub const FOOD: &[&str] = &[
    "사과", "바나나", "피자", "햄버거", "김치", "라면", "치킨", "스테이크", "초밥", "파스타",
    "샐러드", "케이크",
];

pub const ANIMAL: &[&str] = &[
    "강아지", "고양이", "사자", "호랑이", "코끼리", "기린", "펭귄", "돌고래", "독수리", "토끼",
    "여우", "곰",
];

pub const PLACE: &[&str] = &[
    "학교", "병원", "공원", "도서관", "카페", "영화관", "공항", "지하철", "백화점", "박물관",
    "체육관", "해변",
];

pub const JOB: &[&str] = &[
    "의사",
    "선생님",
    "경찰",
    "소방관",
    "요리사",
    "변호사",
    "가수",
    "배우",
    "운동선수",
    "프로그래머",
    "디자이너",
    "작가",
];

pub const MOVIE: &[&str] = &[
    "타이타닉",
    "어벤져스",
    "해리포터",
    "반지의제왕",
    "스타워즈",
    "인터스텔라",
    "기생충",
    "겨울왕국",
    "라이온킹",
    "토이스토리",
    "인셉션",
    "매트릭스",
];

const FOOD_SPY: SpyTable = &[
    ("사과", &["배", "복숭아", "토마토"]),
    ("바나나", &["옥수수", "고구마", "감자"]),
    ("피자", &["파스타", "햄버거", "샌드위치"]),
    ("햄버거", &["샌드위치", "핫도그", "피자"]),
    ("김치", &["깍두기", "젓갈", "장아찌"]),
    ("라면", &["우동", "쌀국수", "파스타"]),
    ("치킨", &["오리", "삼겹살", "갈비"]),
    ("스테이크", &["삼겹살", "갈비", "불고기"]),
    ("초밥", &["회", "연어", "참치"]),
    ("파스타", &["스파게티", "라면", "우동"]),
    ("샐러드", &["비빔밥", "쌈", "나물"]),
    ("케이크", &["빵", "쿠키", "마카롱"]),
];

const ANIMAL_SPY: SpyTable = &[
    ("강아지", &["고양이", "토끼", "햄스터"]),
    ("고양이", &["강아지", "호랑이", "사자"]),
    ("사자", &["호랑이", "표범", "치타"]),
    ("호랑이", &["사자", "표범", "고양이"]),
    ("코끼리", &["하마", "코뿔소", "기린"]),
    ("기린", &["코끼리", "얼룩말", "사슴"]),
    ("펭귄", &["오리", "백조", "갈매기"]),
    ("돌고래", &["고래", "상어", "물개"]),
    ("독수리", &["매", "까마귀", "부엉이"]),
    ("토끼", &["다람쥐", "햄스터", "강아지"]),
    ("여우", &["늑대", "개", "너구리"]),
    ("곰", &["판다", "코알라", "너구리"]),
];

const PLACE_SPY: SpyTable = &[
    ("학교", &["학원", "도서관", "대학교"]),
    ("병원", &["약국", "보건소", "한의원"]),
    ("공원", &["놀이터", "산", "정원"]),
    ("도서관", &["서점", "학교", "독서실"]),
    ("카페", &["레스토랑", "베이커리", "찻집"]),
    ("영화관", &["극장", "공연장", "콘서트홀"]),
    ("공항", &["항구", "기차역", "터미널"]),
    ("지하철", &["버스", "기차", "전철"]),
    ("백화점", &["마트", "시장", "쇼핑몰"]),
    ("박물관", &["미술관", "전시관", "갤러리"]),
    ("체육관", &["운동장", "헬스장", "수영장"]),
    ("해변", &["바다", "강", "호수"]),
];

const JOB_SPY: SpyTable = &[
    ("의사", &["간호사", "약사", "한의사"]),
    ("선생님", &["교수", "강사", "학원강사"]),
    ("경찰", &["군인", "경비원", "소방관"]),
    ("소방관", &["경찰", "구급대원", "군인"]),
    ("요리사", &["제빵사", "바리스타", "영양사"]),
    ("변호사", &["판사", "검사", "법무사"]),
    ("가수", &["배우", "댄서", "뮤지션"]),
    ("배우", &["가수", "모델", "코미디언"]),
    ("운동선수", &["코치", "심판", "트레이너"]),
    ("프로그래머", &["개발자", "디자이너", "기획자"]),
    ("디자이너", &["일러스트레이터", "작가", "건축가"]),
    ("작가", &["기자", "편집자", "시인"]),
];

const MOVIE_SPY: SpyTable = &[
    ("타이타닉", &["노트북", "어바웃타임", "러브액츄얼리"]),
    ("어벤져스", &["저스티스리그", "엑스맨", "스파이더맨"]),
    ("해리포터", &["반지의제왕", "나니아연대기", "퍼시잭슨"]),
    ("반지의제왕", &["해리포터", "호빗", "나니아연대기"]),
    ("스타워즈", &["스타트렉", "가디언즈오브갤럭시", "듄"]),
    ("인터스텔라", &["그래비티", "마션", "컨택트"]),
    ("기생충", &["살인의추억", "괴물", "설국열차"]),
    ("겨울왕국", &["모아나", "라푼젤", "인어공주"]),
    ("라이온킹", &["정글북", "타잔", "니모를찾아서"]),
    ("토이스토리", &["몬스터주식회사", "인사이드아웃", "업"]),
    ("인셉션", &["매트릭스", "셔터아일랜드", "메멘토"]),
    ("매트릭스", &["인셉션", "블레이드러너", "토탈리콜"]),
];

/// Word bank for a category. `Random` has no bank of its own and gets food.
pub fn word_bank(category: Category) -> &'static [&'static str] {
    match category {
        Category::Food | Category::Random => FOOD,
        Category::Animal => ANIMAL,
        Category::Place => PLACE,
        Category::Job => JOB,
        Category::Movie => MOVIE,
    }
}

fn spy_table(category: Category) -> SpyTable {
    match category {
        Category::Food => FOOD_SPY,
        Category::Animal => ANIMAL_SPY,
        Category::Place => PLACE_SPY,
        Category::Job => JOB_SPY,
        Category::Movie => MOVIE_SPY,
        Category::Random => &[],
    }
}

/// Curated spy candidates for a specific word, if any
pub fn spy_candidates(category: Category, word: &str) -> Option<&'static [&'static str]> {
    spy_table(category)
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, candidates)| *candidates)
}

/// Words drawn for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDraw {
    pub main_word: String,
    pub spy_word: String,
    pub category: Category,
}

/// Resolve the category and draw the citizens' word plus a spy word.
///
/// Draw order is fixed (category, main word, spy word) so a seeded RNG
/// always yields the same round.
pub fn draw_words<R: Rng + ?Sized>(
    category: Category,
    similarity: SpySimilarity,
    rng: &mut R,
) -> WordDraw {
    let category = match category {
        Category::Random => *Category::FIXED.choose(rng).unwrap_or(&Category::Food),
        fixed => fixed,
    };

    let bank = word_bank(category);
    let main_word = bank.choose(rng).copied().unwrap_or_default();
    let spy_word = pick_spy_word(main_word, category, similarity, rng);

    WordDraw {
        main_word: main_word.to_string(),
        spy_word,
        category,
    }
}

/// Pick the spy's word for `main_word`.
///
/// `similarity` is accepted but every tier shares one candidate table.
pub fn pick_spy_word<R: Rng + ?Sized>(
    main_word: &str,
    category: Category,
    _similarity: SpySimilarity,
    rng: &mut R,
) -> String {
    spy_word_from(main_word, spy_table(category), word_bank(category), rng)
}

fn spy_word_from<R: Rng + ?Sized>(
    main_word: &str,
    table: SpyTable,
    bank: &[&str],
    rng: &mut R,
) -> String {
    let candidates: Vec<&str> = match table.iter().find(|(w, _)| *w == main_word) {
        Some((_, curated)) => curated.to_vec(),
        None => table
            .iter()
            .flat_map(|(_, curated)| curated.iter().copied())
            .collect(),
    };

    if let Some(word) = candidates.choose(rng) {
        return word.to_string();
    }

    bank.iter()
        .copied()
        .filter(|w| *w != main_word)
        .min()
        .unwrap_or(main_word)
        .to_string()
}
