mod presentation;
