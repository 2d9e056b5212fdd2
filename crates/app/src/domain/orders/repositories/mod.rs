//! Orders Repositories

mod addresses;
mod items;
mod orders;

pub(crate) use addresses::PgAddressesRepository;
pub(crate) use items::PgOrderItemsRepository;
pub(crate) use orders::PgOrdersRepository;
