use sea_query::Iden;

// Products are not exposed through this service, but cascade delete
// has to reach their table.
#[derive(Iden)]
pub enum Products {
    Table,
    Id,
    CategoryId,
}
