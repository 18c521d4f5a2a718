mod boat;
mod load;
