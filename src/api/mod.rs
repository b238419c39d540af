/*
* HTTP surface of the service, grouped by resource.
*/

pub mod users;
