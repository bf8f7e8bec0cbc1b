mod principal;
