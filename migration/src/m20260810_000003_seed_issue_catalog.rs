use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Curated ballot catalog. Ids 101-128 are national questions, 201-220 are
/// scoped to New York. Ids are stable across environments so that votes and
/// cached scores survive a reseed.
const CATALOG: &[(i64, &str, &str)] = &[
    (
        101,
        "Should parents be allowed to use public funds (vouchers) to send their children to private schools?",
        "National",
    ),
    (
        102,
        "Should public colleges and universities be free for in-state residents?",
        "National",
    ),
    (
        103,
        "Should the government impose more regulations on large tech companies to prevent monopolies?",
        "National",
    ),
    (
        104,
        "Should the United States reduce foreign military interventions and focus on domestic issues?",
        "National",
    ),
    (
        105,
        "Should the government regulate the use of facial recognition technology by law enforcement?",
        "National",
    ),
    (
        106,
        "Should GMOs be more strictly regulated or banned in consumer food products?",
        "National",
    ),
    (
        107,
        "Should the U.S. enact stricter environmental rules, even if they slow some economic growth?",
        "National",
    ),
    (
        108,
        "Should health insurance companies be required to cover pre-existing conditions?",
        "National",
    ),
    (109, "Should the federal voting age be lowered to 16?", "National"),
    (
        110,
        "Should children be required to show proof of vaccination to attend public schools?",
        "National",
    ),
    (
        111,
        "Should local or state governments be allowed to pass laws that differ significantly from federal policy on major issues?",
        "National",
    ),
    (
        112,
        "Should transgender athletes be allowed to join teams matching their gender identity at all levels?",
        "National",
    ),
    (
        113,
        "Should parents be allowed to refuse certain medical treatments for their children on religious grounds?",
        "National",
    ),
    (
        114,
        "Should hate speech be protected under free speech laws?",
        "National",
    ),
    (
        115,
        "Should local school boards be allowed to remove books from school libraries based on content?",
        "National",
    ),
    (
        116,
        "Should there be a federal ban on \"conversion therapy\" for minors?",
        "National",
    ),
    (
        117,
        "Should minors have access to gender-affirming healthcare without parental consent?",
        "National",
    ),
    (
        118,
        "Should universal childcare be provided by the federal government?",
        "National",
    ),
    (
        119,
        "Should public schools teach comprehensive sex education, including contraception and LGBTQ+ topics?",
        "National",
    ),
    (
        120,
        "Should the legal drinking age be lowered from 21 to 18?",
        "National",
    ),
    (
        121,
        "Should parents be allowed to homeschool their children without meeting state education standards?",
        "National",
    ),
    (
        122,
        "Should publicly funded adoption agencies be allowed to turn away prospective parents based on religious beliefs?",
        "National",
    ),
    (
        123,
        "Should businesses be allowed to refuse service to same-sex couples on religious grounds?",
        "National",
    ),
    (
        124,
        "Should the U.S. legalize physician-assisted suicide for terminally ill patients who consent?",
        "National",
    ),
    (
        125,
        "Should the government enforce stronger rules against \"offensive\" content on social media, beyond current laws?",
        "National",
    ),
    (
        126,
        "Should people be allowed to use certain psychedelics (like psilocybin) for therapy under medical supervision?",
        "National",
    ),
    (
        127,
        "Should police departments be required to reflect the demographics of the communities they serve?",
        "National",
    ),
    (
        128,
        "Should there be nationwide rent control to address housing affordability?",
        "National",
    ),
    (
        201,
        "Should New York State keep its current bail reform laws?",
        "New York",
    ),
    (
        202,
        "Should undocumented immigrants in New York State be eligible for driver's licenses?",
        "New York",
    ),
    (
        203,
        "Should New York State adopt a single-payer healthcare system, independent of federal policy?",
        "New York",
    ),
    (
        204,
        "Should all New York State landlords follow the same rent stabilization rules as in New York City?",
        "New York",
    ),
    (
        205,
        "Should New York State fully ban fracking and new natural gas pipelines?",
        "New York",
    ),
    (
        206,
        "Should New York City eliminate its gifted and talented programs in public schools to promote equity?",
        "New York",
    ),
    (
        207,
        "Should New York State invest public funds to create safe injection sites for drug users?",
        "New York",
    ),
    (
        208,
        "Should New York State limit annual property tax increases for homeowners?",
        "New York",
    ),
    (
        209,
        "Should the MTA receive more New York State funding, even if that means higher taxes or fares?",
        "New York",
    ),
    (
        210,
        "Should New York State impose congestion pricing in Manhattan below 60th Street?",
        "New York",
    ),
    (
        211,
        "Should New York State require new housing projects to include affordable units?",
        "New York",
    ),
    (
        212,
        "Should New York State impose stricter rules on short-term rentals (like Airbnb) to help address the housing shortage?",
        "New York",
    ),
    (
        213,
        "Should local governments in New York State be able to opt out of legal cannabis?",
        "New York",
    ),
    (
        214,
        "Should New York State ban the sale of all flavored tobacco and vaping products?",
        "New York",
    ),
    (
        215,
        "Should New York State make all SUNY and CUNY schools tuition-free for in-state residents?",
        "New York",
    ),
    (
        216,
        "Should the New York State constitution explicitly protect abortion rights?",
        "New York",
    ),
    (
        217,
        "Should teacher salaries in New York State be funded mainly by the state to reduce disparities among districts?",
        "New York",
    ),
    (
        218,
        "Should New York State raise taxes on high earners to fund social programs like healthcare and housing?",
        "New York",
    ),
    (
        219,
        "Should New York State invest in a public broadband network to guarantee high-speed internet for all residents?",
        "New York",
    ),
    (
        220,
        "Should solitary confinement be completely banned in New York State prisons and jails?",
        "New York",
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Issues::Table)
            .columns([Issues::Id, Issues::Prompt, Issues::Scope])
            .to_owned();
        for (id, prompt, scope) in CATALOG {
            insert.values_panic([(*id).into(), (*prompt).into(), (*scope).into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i64> = CATALOG.iter().map(|(id, _, _)| *id).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Issues::Table)
                    .and_where(Expr::col(Issues::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Issues {
    Table,
    Id,
    Prompt,
    Scope,
}
