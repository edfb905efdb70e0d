use sea_query::Iden;

#[derive(Iden)]
pub enum Categories {
    Table,
    Id,
    Name,
}
