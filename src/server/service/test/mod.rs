mod boat;
mod load;
mod relationship;
mod user;
