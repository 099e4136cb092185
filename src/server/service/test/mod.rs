mod order;
mod restaurant;
