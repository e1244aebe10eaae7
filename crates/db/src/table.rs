use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
}
