//! Database seeding command.
//!
//! Inserts a small sample catalog (categories, products), a doctor with two
//! articles, story page sections, and a few approved reviews so a fresh
//! environment has something to render.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use super::CommandError;

/// A sample product: (slug, name, description, ingredients, price, stock,
/// featured, category slug).
type SeedProduct = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Decimal,
    i32,
    bool,
    &'static str,
);

const CATEGORIES: &[(&str, &str, &str)] = &[
    (
        "stress-relief",
        "Stress Relief",
        "Adaptogens and calming formulations",
    ),
    (
        "immunity",
        "Immunity",
        "Daily support for natural defences",
    ),
    (
        "digestive-health",
        "Digestive Health",
        "Classical digestive formulations",
    ),
    (
        "mental-clarity",
        "Mental Clarity",
        "Herbs for focus and memory",
    ),
];

fn seed_products() -> Vec<SeedProduct> {
    vec![
        (
            "ashwagandha-capsules",
            "Ashwagandha Capsules",
            "Classical adaptogen for everyday stress",
            "Withania somnifera root extract",
            Decimal::new(59900, 2),
            120,
            false,
            "stress-relief",
        ),
        (
            "turmeric-curcumin",
            "Turmeric Curcumin",
            "Golden milk staple with black pepper extract",
            "Curcuma longa rhizome, piperine",
            Decimal::new(44900, 2),
            200,
            true,
            "immunity",
        ),
        (
            "triphala-churna",
            "Triphala Churna",
            "Three-fruit digestive powder",
            "Amalaki, bibhitaki, haritaki",
            Decimal::new(29900, 2),
            150,
            false,
            "digestive-health",
        ),
        (
            "brahmi-memory-tonic",
            "Brahmi Memory Tonic",
            "Traditional support for focus and recall",
            "Bacopa monnieri whole plant extract",
            Decimal::new(34900, 2),
            80,
            true,
            "mental-clarity",
        ),
        (
            "chyawanprash",
            "Chyawanprash",
            "Herbal jam with amla and forty supporting herbs",
            "Amla, ashwagandha, pippali, honey",
            Decimal::new(69900, 2),
            60,
            true,
            "immunity",
        ),
    ]
}

/// Seed the database with sample data.
///
/// Refuses to touch a non-empty catalog unless `force` is set; every insert
/// is idempotent (`ON CONFLICT DO NOTHING` on natural keys), so re-running
/// is safe either way.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run(force: bool) -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await?;
    if existing > 0 && !force {
        info!(existing, "products table is not empty; use --force to seed anyway");
        return Ok(());
    }

    seed_categories(&pool).await?;
    seed_catalog(&pool).await?;
    seed_editorial(&pool).await?;
    seed_story(&pool).await?;

    info!("Seeding complete");
    Ok(())
}

async fn seed_categories(pool: &PgPool) -> Result<(), CommandError> {
    for (slug, name, description) in CATEGORIES {
        sqlx::query(
            r"
            INSERT INTO categories (slug, name, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(slug)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    }
    info!(count = CATEGORIES.len(), "categories seeded");
    Ok(())
}

async fn seed_catalog(pool: &PgPool) -> Result<(), CommandError> {
    let products = seed_products();
    for (slug, name, description, ingredients, price, stock, featured, category_slug) in &products {
        sqlx::query(
            r"
            INSERT INTO products (
                slug, name, description, ingredients, price, stock, featured,
                category_id
            )
            SELECT $1, $2, $3, $4, $5, $6, $7, c.id
            FROM categories c
            WHERE c.slug = $8
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(slug)
        .bind(name)
        .bind(description)
        .bind(ingredients)
        .bind(price)
        .bind(stock)
        .bind(featured)
        .bind(category_slug)
        .execute(pool)
        .await?;
    }
    info!(count = products.len(), "products seeded");
    Ok(())
}

async fn seed_editorial(pool: &PgPool) -> Result<(), CommandError> {
    sqlx::query(
        r"
        INSERT INTO doctors (name, title, specialization, bio, certifications, experience_years)
        SELECT 'Dr. Priya Sharma', 'BAMS, MD (Ayurveda)', 'Kayachikitsa',
               'Practicing classical Ayurveda with a focus on lifestyle disorders.',
               ARRAY['BAMS', 'MD Ayurveda'], 14
        WHERE NOT EXISTS (SELECT 1 FROM doctors WHERE name = 'Dr. Priya Sharma')
        ",
    )
    .execute(pool)
    .await?;

    let articles: &[(&str, &str, &str, &str, i32)] = &[
        (
            "understanding-your-dosha",
            "Understanding Your Dosha",
            "# Understanding Your Dosha\n\nVata, pitta, and kapha are the three \
             constitutional energies of Ayurveda...",
            "A practical introduction to the three doshas.",
            6,
        ),
        (
            "daily-rituals-for-balance",
            "Daily Rituals for Balance",
            "# Daily Rituals for Balance\n\nDinacharya, the Ayurvedic daily routine, \
             starts before sunrise...",
            "Morning and evening routines from classical texts.",
            8,
        ),
    ];

    for (slug, title, content, excerpt, read_time) in articles {
        sqlx::query(
            r"
            INSERT INTO articles (slug, title, content, excerpt, category, tags,
                                  read_time, doctor_id, published_at)
            SELECT $1, $2, $3, $4, 'wellness', ARRAY['ayurveda', 'basics'], $5,
                   d.id, now()
            FROM doctors d
            WHERE d.name = 'Dr. Priya Sharma'
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(slug)
        .bind(title)
        .bind(content)
        .bind(excerpt)
        .bind(read_time)
        .execute(pool)
        .await?;
    }

    sqlx::query(
        r"
        INSERT INTO reviews (name, location, product, rating, review_text, approved)
        SELECT 'Meera Nair', 'Kochi', 'Ashwagandha Capsules', 5,
               'Two months in and my sleep is noticeably better.', TRUE
        WHERE NOT EXISTS (
            SELECT 1 FROM reviews WHERE name = 'Meera Nair' AND product = 'Ashwagandha Capsules'
        )
        ",
    )
    .execute(pool)
    .await?;

    info!("editorial content seeded");
    Ok(())
}

async fn seed_story(pool: &PgPool) -> Result<(), CommandError> {
    let sections: &[(&str, &str, &str, i32)] = &[
        (
            "our-roots",
            "Our Roots",
            "Amrita began in a family pharmacy in Kerala, compounding classical \
             formulations the way they appear in the texts.",
            1,
        ),
        (
            "how-we-source",
            "How We Source",
            "Every herb is traceable to the farm cooperative that grew it, and \
             every batch is third-party tested.",
            2,
        ),
    ];

    for (slug, title, content, section_order) in sections {
        sqlx::query(
            r"
            INSERT INTO learn_more_content (slug, title, content, section_order)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(slug)
        .bind(title)
        .bind(content)
        .bind(section_order)
        .execute(pool)
        .await?;
    }

    info!("story sections seeded");
    Ok(())
}
